// Public library interface for treemap-placer
// The CLI and the debug tool use these modules

pub mod layout;
pub mod scanner;
pub mod tree;
