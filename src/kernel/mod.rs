pub mod event;
pub mod reactor;
pub mod state;
