// Application layer modules
pub mod application;

// Domain layer modules
pub mod domain;

// Infrastructure layer modules
pub mod infrastructure;
