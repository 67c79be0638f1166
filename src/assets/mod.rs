//! Asset registry - CRUD over car records keyed by asset id.

use tracing::info;

use crate::codec;
use crate::error::ChaincodeError;
use crate::ledger::Ledger;
use crate::model::Car;

/// Car operations over a borrowed ledger.
pub struct AssetRegistry<'a> {
    ledger: &'a dyn Ledger,
}

impl<'a> AssetRegistry<'a> {
    pub fn new(ledger: &'a dyn Ledger) -> Self {
        Self { ledger }
    }

    /// Write `car` under `id`, replacing whatever was there.
    pub fn create_car(&self, id: &str, car: &Car) -> Result<(), ChaincodeError> {
        if let Some(field) = car.blank_field() {
            return Err(ChaincodeError::InvalidArgument {
                function: "createCar".into(),
                reason: format!("{field} must not be empty"),
            });
        }
        self.ledger.put_state(id, codec::encode(car)?)?;
        info!(id, owner = %car.owner, "car created");
        Ok(())
    }

    /// Stored bytes for `id`, exactly as written.
    pub fn query_car(&self, id: &str) -> Result<Vec<u8>, ChaincodeError> {
        let bytes = self.ledger.get_state(id)?;
        if bytes.is_empty() {
            return Err(ChaincodeError::NotFound(id.to_string()));
        }
        Ok(bytes)
    }

    /// Decoded car for `id`.
    pub fn car(&self, id: &str) -> Result<Car, ChaincodeError> {
        let bytes = self.ledger.get_state(id)?;
        codec::decode(id, &bytes)
    }

    /// Reassign the owner of `id`, rewriting the whole record.
    pub fn change_car_owner(&self, id: &str, new_owner: &str) -> Result<Car, ChaincodeError> {
        let mut car = self.car(id)?;
        let previous = std::mem::replace(&mut car.owner, new_owner.to_string());
        self.ledger.put_state(id, codec::encode(&car)?)?;
        info!(id, from = %previous, to = %new_owner, "car owner changed");
        Ok(car)
    }
}
