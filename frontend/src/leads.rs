use gloo_net::http::Request;
use serde::{Serialize, Serializer};

use crate::config;
use crate::error::ApiError;

/// A contact request captured by the "Comienza ahora" form. Serialized with
/// the column names of the lead table.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Lead {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "telefono", serialize_with = "blank_as_null")]
    pub phone: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl Lead {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::FirstName => self.first_name = value,
            LeadField::LastName => self.last_name = value,
            LeadField::Email => self.email = value,
            LeadField::Phone => self.phone = value,
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
        }
    }
}

fn blank_as_null<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.trim().is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_str(value)
    }
}

/// Inserts one lead row into the record store.
pub async fn submit_lead(lead: &Lead) -> Result<(), ApiError> {
    let url = config::join_url(
        config::get_store_url(),
        &format!("/rest/v1/{}", config::LEADS_TABLE),
    );
    let key = config::get_store_key();

    let response = Request::post(&url)
        .header("apikey", key)
        .header("Authorization", &format!("Bearer {}", key))
        .header("Prefer", "return=minimal")
        .json(&[lead])?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}
