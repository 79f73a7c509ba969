pub mod table;
pub mod view;

pub use table::ForecastTable;
pub use view::ForecastView;
