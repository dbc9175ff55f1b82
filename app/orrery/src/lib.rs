use wasm_bindgen::prelude::*;
use helio_engine::*;

mod bodies;
mod game;
mod orbit;
use game::Orrery;

helio_web::export_scene!(Orrery, "orrery");
