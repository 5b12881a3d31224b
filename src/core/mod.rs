// ============================================
// Core Module - Приложение и ресурсы
// ============================================

pub mod app;
pub mod resources;

pub use app::run;
pub use resources::GameResources;
