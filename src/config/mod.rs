// Static navigation configuration shared by every consumer surface.

pub mod menu;
