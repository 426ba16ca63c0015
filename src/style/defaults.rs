use crate::geom;

pub const FONT_FAMILY: &str = "sans-serif";
pub const FIG_SIZE: geom::Size = geom::Size::new(6.0, 4.5);

pub const TITLE_FONT_SIZE: f32 = 10.0;
pub const TITLE_FONT_WEIGHT: &str = "normal";
pub const TITLE_PAD: f32 = 5.0;
pub const ABC_FONT_SIZE: f32 = 10.0;
pub const ABC_FONT_WEIGHT: &str = "bold";
pub const ABC_TITLE_PAD: f32 = 4.0;

pub const BORDER_WIDTH: f32 = 2.0;
pub const BBOX_STYLE: &str = "round";
pub const BBOX_ALPHA: f32 = 0.5;

pub const PANEL_WIDTH: f32 = 0.5;
pub const PANEL_FILLED_WIDTH: f32 = 0.2;
pub const PANEL_SPACE: f32 = 0.1;

pub const LEGEND_NCOL: usize = 3;
pub const LEGEND_FONT_SIZE: f32 = 9.0;
pub const LEGEND_LABEL_SPACING: f32 = 0.5;
pub const TICK_LABEL_SIZE: f32 = 9.0;

pub const MAX_PARENT_DEPTH: usize = 32;
