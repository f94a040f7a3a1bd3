pub mod amount;
pub mod auth_models;
pub mod feedback_models;
pub mod nutrition_models;
pub mod recipe_models;
pub mod response_models;
pub mod saved_recipe_models;
pub mod site_models;
pub mod user_models;

pub use amount::Amount;
pub use auth_models::{AuthMessage, LoginForm, RegisterForm, TokenResponse};
pub use feedback_models::{CreateFeedbackRequest, Feedback, FeedbackChanges, NewFeedback};
pub use nutrition_models::{NewNutritionInfo, NutritionChanges, NutritionInfo};
pub use recipe_models::{CreateRecipeRequest, NewRecipe, Recipe, RecipeChanges, RecipeFilter};
pub use response_models::{ApiMessage, CreatedResponse};
pub use saved_recipe_models::SavedRecipe;
pub use site_models::{CreateSiteRequest, NewSite, Site, SiteChanges};
pub use user_models::{CreateUserRequest, NewUser, UpdateUserRequest, User, UserChanges, UserResponse};
