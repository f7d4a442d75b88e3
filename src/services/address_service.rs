use crate::data::models::address::Address;
use crate::data::repos::traits::AddressStore;
use crate::services::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct NewAddressFields {
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
}

#[derive(Clone)]
pub struct AddressService {
    addresses: Arc<dyn AddressStore>,
}

impl AddressService {
    pub fn new(addresses: Arc<dyn AddressStore>) -> Self {
        AddressService { addresses }
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<Address>, ServiceError> {
        Ok(self.addresses.list_for_user(user_id).await?)
    }

    /// A new default address first demotes every existing one. A crash
    /// between the two steps leaves zero defaults, never two.
    pub async fn create(
        &self,
        user_id: &str,
        fields: NewAddressFields,
    ) -> Result<Address, ServiceError> {
        if fields.full_name.trim().is_empty() || fields.address_line1.trim().is_empty() {
            return Err(ServiceError::Validation(
                "Name and address line are required".into(),
            ));
        }

        if fields.is_default {
            self.addresses.clear_defaults(user_id).await?;
        }

        let address = Address {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            full_name: fields.full_name,
            phone: fields.phone,
            address_line1: fields.address_line1,
            address_line2: fields.address_line2,
            city: fields.city,
            state: fields.state,
            zip_code: fields.zip_code,
            country: fields.country,
            is_default: fields.is_default,
        };

        self.addresses.insert(address.clone()).await?;
        Ok(address)
    }

    pub async fn delete(&self, id: &str, user_id: &str) -> Result<(), ServiceError> {
        if self.addresses.delete(id, user_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Address"))
        }
    }
}
