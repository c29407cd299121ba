//! User domain models and parameters.

use crate::{
    model::user::{LoginDto, RegisterUserDto, UserDto, UserSummaryDto, VoterDto},
    server::{error::validation::ValidationErrors, util::validation::Validator},
};

/// A registered user.
///
/// The password hash never leaves the data layer except through
/// `UserRepository::find_credentials_by_email`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
        }
    }

    /// Projection used when the user is nested inside another resource.
    pub fn to_summary_dto(&self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Projection of a user id inside a poll choice's vote list.
pub fn voter_dto(user_id: i32) -> VoterDto {
    VoterDto { id: user_id }
}

/// Validated registration data. The password is still plain text here.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterUserParam {
    /// Validates a registration request.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Every field satisfied its constraints
    /// - `Err(ValidationErrors)` - One violation per failing field
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("email", dto.email.as_deref())
            .email("email", dto.email.as_deref());
        v.not_blank("password", dto.password.as_deref()).min_length(
            "password",
            dto.password.as_deref(),
            6,
            "Your password must be at least 6 characters long",
        );
        v.not_blank("name", dto.name.as_deref())
            .min_length(
                "name",
                dto.name.as_deref(),
                2,
                "Your name must be at least 2 characters long",
            )
            .max_length(
                "name",
                dto.name.as_deref(),
                30,
                "Your name cannot be longer than 30 characters",
            );
        v.finish()?;

        Ok(Self {
            email: dto.email.unwrap_or_default(),
            password: dto.password.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl From<LoginDto> for LoginParam {
    fn from(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
