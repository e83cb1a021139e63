mod adherent_repository;
mod health_check;
mod helpers;
mod registration;
