//! DTOs for the progress_sea adapter.

/// DTO for creating a new conversation progress row.
#[derive(Debug, Clone)]
pub struct ProgressCreate {
    pub alpha_phone: String,
    pub alpha_display_name: String,
    pub story_id: String,
    pub story_type: String,
    pub game_mode: Option<String>,
    pub beta_phone_0: Option<String>,
    pub beta_phone_1: Option<String>,
    pub beta_phone_2: Option<String>,
}

/// DTO for replacing the beta columns of an existing row.
///
/// All three columns are written on every update: slots only ever grow,
/// so writing the full set keeps the row an exact image of the domain
/// value without read-modify-write per column.
#[derive(Debug, Clone)]
pub struct ProgressBetasUpdate {
    pub alpha_phone: String,
    pub beta_phone_0: Option<String>,
    pub beta_phone_1: Option<String>,
    pub beta_phone_2: Option<String>,
}
