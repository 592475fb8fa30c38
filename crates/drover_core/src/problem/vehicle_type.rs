use serde::Serialize;

use crate::{define_index_newtype, problem::amount::Amount};

define_index_newtype!(VehicleTypeIdx, VehicleType);

/// Capacity profile shared by any number of vehicles.
#[derive(Serialize, Debug, Clone)]
pub struct VehicleType {
    external_id: String,
    capacity: Amount,
}

impl VehicleType {
    pub fn new(external_id: impl Into<String>, capacity: Amount) -> Self {
        VehicleType {
            external_id: external_id.into(),
            capacity,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Capacity limit per dimension. Dimensions past the end have a limit of zero.
    pub fn capacity(&self) -> &Amount {
        &self.capacity
    }
}
