use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::activities::core::activity::Activity;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct ActivityNode {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityNode {
    fn from_entry(name: String, activity: Activity) -> Self {
        Self {
            name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<ActivityNode>> {
        let state = context.data_unchecked::<AppState>();
        let catalog = state
            .queries
            .list_activities()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(catalog
            .into_iter()
            .map(|(name, activity)| ActivityNode::from_entry(name, activity))
            .collect())
    }
}
