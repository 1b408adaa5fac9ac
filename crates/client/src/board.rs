use mealbook_mealplan::{MealPlanData, MealType, PlanDate, Week};
use mealbook_shopping::{CategoryGroup, build_shopping_list};

/// Client-side cache of one week's plans.
///
/// The board never touches the network itself. Callers fetch and mutate
/// through [`crate::ApiClient`] and report outcomes here: `replace`
/// installs a fresh snapshot, `apply_create` and `apply_remove` patch it
/// after a confirmed mutation, and `mark_stale` records that the snapshot
/// can no longer be trusted (a mutation failed, or the week moved). A
/// stale board keeps serving its last snapshot until the next `replace`.
#[derive(Debug, Clone)]
pub struct WeekBoard {
    week: Week,
    plans: Vec<MealPlanData>,
    stale: bool,
}

impl WeekBoard {
    /// A fresh board is stale: nothing has been fetched yet.
    pub fn new(week: Week) -> WeekBoard {
        WeekBoard {
            week,
            plans: Vec::new(),
            stale: true,
        }
    }

    /// Board for the week containing the given day.
    pub fn containing(date: PlanDate) -> WeekBoard {
        WeekBoard::new(Week::containing(date))
    }

    pub fn week(&self) -> Week {
        self.week
    }

    pub fn days(&self) -> [PlanDate; 7] {
        self.week.days()
    }

    pub fn plans(&self) -> &[MealPlanData] {
        &self.plans
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Install a freshly fetched snapshot for the current week.
    pub fn replace(&mut self, plans: Vec<MealPlanData>) {
        self.plans = plans;
        self.stale = false;
    }

    /// Record a create the server confirmed.
    pub fn apply_create(&mut self, plan: MealPlanData) {
        self.plans.push(plan);
    }

    /// Record a delete the server confirmed.
    pub fn apply_remove(&mut self, plan_id: &str) {
        self.plans.retain(|plan| plan.id != plan_id);
    }

    /// Flag the snapshot as out of sync with the server. The cached plans
    /// stay rendered as-is until the next `replace`.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Move to the following week. The snapshot belongs to the old week,
    /// so the board goes stale.
    pub fn next_week(&mut self) {
        self.week = self.week.next();
        self.stale = true;
    }

    pub fn previous_week(&mut self) {
        self.week = self.week.previous();
        self.stale = true;
    }

    /// First plan occupying the slot, in fetch order. Duplicate slots are
    /// possible; later ones stay hidden until the earlier one is removed.
    pub fn plan_for_slot(&self, date: PlanDate, meal_type: MealType) -> Option<&MealPlanData> {
        self.plans.iter().find(|plan| {
            plan.meal_type == meal_type.as_ref()
                && PlanDate::parse(&plan.date).is_ok_and(|day| day == date)
        })
    }

    /// Shopping list for everything currently on the board.
    pub fn shopping_list(&self) -> Vec<CategoryGroup> {
        build_shopping_list(&self.plans)
    }
}
