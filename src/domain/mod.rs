// Domain layer - Chart data models, themes and pure helpers
pub mod chart;
pub mod numeric;
pub mod theme;
