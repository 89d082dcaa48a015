use crate::model::Universe;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UniversesIntent {
    Request,
    Success { universes: Vec<Universe> },
    Failure { message: String },
}

impl Intent for UniversesIntent {}
