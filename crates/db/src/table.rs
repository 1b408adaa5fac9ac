use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipes {
    Table,
    Id,
    Name,
    Category,
    PrepTime,
    CookTime,
    Servings,
    Ingredients,
    Instructions,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum MealPlans {
    Table,
    Id,
    Date,
    MealType,
    RecipeId,
    CreatedAt,
}
