//! Background tasks spawned by the server binary.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
