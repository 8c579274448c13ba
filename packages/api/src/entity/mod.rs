//! `SeaORM` entities mapped onto the Prisma-managed schema.

pub mod article;
pub mod comment;
pub mod food;
pub mod food_on_restaurant;
pub mod rating;
pub mod region;
pub mod restaurant;
pub mod review;
pub mod sea_orm_active_enums;
pub mod suggestion;
pub mod user;

pub mod prelude {
    pub use super::article::Entity as Article;
    pub use super::comment::Entity as Comment;
    pub use super::food::Entity as Food;
    pub use super::food_on_restaurant::Entity as FoodOnRestaurant;
    pub use super::rating::Entity as Rating;
    pub use super::region::Entity as Region;
    pub use super::restaurant::Entity as Restaurant;
    pub use super::review::Entity as Review;
    pub use super::suggestion::Entity as Suggestion;
    pub use super::user::Entity as User;
}
