use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::UserId;
use crate::transport::Transport;

/// The user's favorite strains as last confirmed by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteList {
    items: Vec<String>,
}

impl From<Vec<String>> for FavoriteList {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl FavoriteList {
    #[must_use]
    pub fn contains(&self, strain: &str) -> bool {
        self.items.iter().any(|s| s == strain)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Local update once the server accepted the change.
    pub fn apply(&mut self, strain: &str, favorite: bool) {
        if favorite {
            if !self.contains(strain) {
                self.items.push(strain.to_string());
            }
        } else {
            self.items.retain(|s| s != strain);
        }
    }

    /// Add or remove `strain` on the server, then locally. Returns whether the
    /// strain is a favorite afterwards.
    ///
    /// # Errors
    ///
    /// The server error; the list is left untouched.
    pub async fn toggle<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
        user_id: UserId,
        strain: &str,
    ) -> Result<bool, ApiError> {
        let favorite = !self.contains(strain);
        if favorite {
            api.add_favorite(user_id, strain).await?;
        } else {
            api.remove_favorite(user_id, strain).await?;
        }
        self.apply(strain, favorite);
        Ok(favorite)
    }
}
