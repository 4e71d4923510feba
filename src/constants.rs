//! Various constants, for use in various places. Gameplay tuning on top, rendering below.

/// Constants with gameplay implications.
pub mod gameplay {
    /// The session countdown budget, in seconds. Once it runs out the time-up page takes over.
    pub const SESSION_SECONDS: u64 = 300;

    /// Wrong ingredient validations (or failed bakes) before the help window opens.
    pub const ERRORS_BEFORE_HELP: u32 = 5;

    /// How long a help window stays open if the player doesn't dismiss it, in seconds.
    pub const HELP_SECONDS: u64 = 10;

    /// How long the "wrong ingredients" line stays on screen, in seconds.
    pub const ERROR_FLASH_SECONDS: u64 = 3;

    /// Seconds of kneading animation before the dough is declared done.
    pub const KNEAD_SECONDS: f32 = 4.0;

    /// Seconds the "done" message lingers before moving on to the oven.
    pub const KNEAD_REST_SECONDS: f32 = 1.5;

    /// Delay between a successful bake and the automatic jump to the pedagogy page, in seconds.
    pub const PEDAGOGY_DELAY_SECONDS: u64 = 10;

    /// Oven temperature bounds and step, in °C.
    pub const TEMP_MIN: i32 = 100;
    pub const TEMP_MAX: i32 = 300;
    pub const TEMP_STEP: i32 = 10;

    /// Baking duration bounds and step, in minutes.
    pub const MINUTES_MIN: i32 = 1;
    pub const MINUTES_MAX: i32 = 60;
    pub const MINUTES_STEP: i32 = 1;
}

/// Constants specifically relating to how things render.
pub mod graphics {
    /// How many columns the ingredient grid has.
    pub const INGREDIENT_COLUMNS: usize = 5;

    /// Row from the top where screen titles go.
    pub const TITLE_ROW: usize = 1;
}
