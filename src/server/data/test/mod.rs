mod academic;
mod annual_result;
mod applicant;
mod competition;
mod person;
mod student;
mod university;
mod user;
