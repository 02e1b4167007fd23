use crate::server::model::person::CreatePersonParams;
use entity::sea_orm_active_enums::PersonType;

mod annual_result;
mod applicant;
mod application;
mod competition;
mod student;
mod university;
mod user;

/// Person parameters carrying only the required name fields.
fn person_params(person_type: PersonType, first_name: &str, last_name: &str) -> CreatePersonParams {
    CreatePersonParams {
        person_type,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        national_id: None,
        birth_date: None,
        birth_place: None,
        nationality: None,
        address: None,
        phone: None,
        personal_email: None,
        gender: None,
    }
}
