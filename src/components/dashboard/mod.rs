mod chart;
mod controls;
mod threshold;
mod view;

pub use view::Dashboard;
