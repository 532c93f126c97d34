//! Entity trait implementation for the User domain type.

use async_trait::async_trait;

use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserUpdate};

#[async_trait]
impl ActorEntity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type UpdateParams = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: String, params: UserCreate) -> Result<Self, String> {
        if params.email.trim().is_empty() {
            return Err("email must not be empty".to_string());
        }
        let mut user = User::new(params.email, params.name);
        user.id = id;
        Ok(user)
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &Self::Context) -> Result<(), String> {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String> {
        Ok(())
    }
}
