use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRestaurantDto {
    pub name: String,
    pub address: String,
    pub cover_image: String,
    /// Optional category name; categories are created on first use.
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub cover_image: String,
    pub category_id: Option<i32>,
    pub owner_id: i32,
    pub is_promoted: bool,
    pub promoted_until: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DishOptionChoiceDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DishOptionDto {
    pub name: String,
    /// Flat surcharge; when set, `choices` are ignored for pricing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<DishOptionChoiceDto>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDishDto {
    pub name: String,
    /// Base price in minor currency units.
    pub price: i64,
    pub description: String,
    pub photo: Option<String>,
    #[serde(default)]
    pub options: Vec<DishOptionDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DishDto {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub photo: Option<String>,
    pub restaurant_id: i32,
    pub options: Vec<DishOptionDto>,
}

impl From<entity::dish::DishOption> for DishOptionDto {
    fn from(option: entity::dish::DishOption) -> Self {
        Self {
            name: option.name,
            extra: option.extra,
            choices: option.choices.map(|choices| {
                choices
                    .into_iter()
                    .map(|choice| DishOptionChoiceDto {
                        name: choice.name,
                        extra: choice.extra,
                    })
                    .collect()
            }),
        }
    }
}

impl From<DishOptionDto> for entity::dish::DishOption {
    fn from(dto: DishOptionDto) -> Self {
        Self {
            name: dto.name,
            extra: dto.extra,
            choices: dto.choices.map(|choices| {
                choices
                    .into_iter()
                    .map(|choice| entity::dish::DishOptionChoice {
                        name: choice.name,
                        extra: choice.extra,
                    })
                    .collect()
            }),
        }
    }
}
