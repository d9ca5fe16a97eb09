pub mod category_dto;

pub use category_dto::{CategoryRequestDto, CategoryResponseDto, ListCategoriesQuery};
