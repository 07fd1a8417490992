//! Profile Application Service (Use Case)

use std::sync::Arc;

use quoter::{DomainError, Profile, ProfileRepository, UserIdentity};

/// Application service for profile settings
pub struct ProfileService<R: ProfileRepository> {
    repo: Arc<R>,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The caller's profile, or an empty one if never saved
    pub async fn get(&self, user: &UserIdentity) -> Result<Profile, DomainError> {
        Ok(self
            .repo
            .find(user.user_id)
            .await?
            .unwrap_or_else(|| Profile::empty(user.user_id)))
    }

    /// Upsert the caller's profile settings. Fields left as None keep
    /// their stored value.
    pub async fn update(
        &self,
        user: &UserIdentity,
        full_name: Option<String>,
        bio: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<Profile, DomainError> {
        let current = self.get(user).await?;

        let profile = Profile {
            user_id: user.user_id,
            full_name: full_name.or(current.full_name),
            bio: bio.or(current.bio),
            avatar_url: avatar_url.or(current.avatar_url),
            updated_at: chrono::Utc::now(),
        };

        let saved = self.repo.upsert(&profile).await?;

        tracing::info!("Updated profile for user {}", user.user_id);

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct InMemoryProfileRepository {
        profiles: Mutex<HashMap<Uuid, Profile>>,
    }

    #[async_trait]
    impl ProfileRepository for InMemoryProfileRepository {
        async fn find(&self, user_id: Uuid) -> Result<Option<Profile>, DomainError> {
            Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
        }

        async fn upsert(&self, profile: &Profile) -> Result<Profile, DomainError> {
            self.profiles
                .lock()
                .unwrap()
                .insert(profile.user_id, profile.clone());
            Ok(profile.clone())
        }
    }

    fn user() -> UserIdentity {
        UserIdentity {
            user_id: Uuid::new_v4(),
            email: "quoter@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_unsaved_profile_reads_as_empty() {
        let service = ProfileService::new(Arc::new(InMemoryProfileRepository::default()));
        let caller = user();

        let profile = service.get(&caller).await.unwrap();
        assert_eq!(profile.user_id, caller.user_id);
        assert!(profile.full_name.is_none());
    }

    #[tokio::test]
    async fn test_update_preserves_unset_fields() {
        let service = ProfileService::new(Arc::new(InMemoryProfileRepository::default()));
        let caller = user();

        service
            .update(&caller, Some("Maya".to_string()), Some("bio".to_string()), None)
            .await
            .unwrap();

        let updated = service
            .update(&caller, None, None, Some("/avatars/a2.svg".to_string()))
            .await
            .unwrap();

        assert_eq!(updated.full_name.as_deref(), Some("Maya"));
        assert_eq!(updated.bio.as_deref(), Some("bio"));
        assert_eq!(updated.avatar_url.as_deref(), Some("/avatars/a2.svg"));
    }
}
