mod points;
mod setting;
