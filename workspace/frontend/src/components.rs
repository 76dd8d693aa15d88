pub mod bucket_control;
pub mod charts;
pub mod date_bar;
pub mod layout;
pub mod plot;
pub mod top_zones;
pub mod zone_map;
