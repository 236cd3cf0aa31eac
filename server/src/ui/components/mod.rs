//! Reusable UI components

mod badge;
mod bullet;
mod card;
mod panel;
mod robot;
mod status_badge;

pub use badge::Badge;
pub use bullet::Bullet;
pub use card::DashboardCard;
pub use panel::StatusPanel;
pub use robot::RobotMascot;
pub use status_badge::StatusBadge;
