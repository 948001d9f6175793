pub use super::category::Entity as Category;
pub use super::dish::Entity as Dish;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::payment::Entity as Payment;
pub use super::restaurant::Entity as Restaurant;
pub use super::user::Entity as User;
