pub mod account_dto;

pub use account_dto::{AccountResponseDto, DirectoryEntryDto, RegisterAccountDto, UpdateRoleDto};
