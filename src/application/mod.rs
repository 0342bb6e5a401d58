// Application layer - Dashboard behaviour over the rendering surface
pub mod animator;
pub mod controller;
pub mod notifications;
pub mod render_surface;
pub mod scheduler;
pub mod selector;
