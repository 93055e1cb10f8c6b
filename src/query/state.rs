use crate::model::api::ApiError;

/// Render state of a page query.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    NotFound,
    /// Transport or permission failure; pages show a generic message.
    Failed,
    Ready(T),
}

impl<T: Clone> LoadState<T> {
    /// Maps the value of an async resource, `None` meaning the request has not settled.
    pub fn from_resource(value: Option<&Result<T, ApiError>>) -> Self {
        match value {
            None => LoadState::Loading,
            Some(Ok(value)) => LoadState::Ready(value.clone()),
            Some(Err(ApiError::NotFound)) => LoadState::NotFound,
            Some(Err(_)) => LoadState::Failed,
        }
    }

    /// Like [`LoadState::from_resource`] for reads that report absence as `Ok(None)`.
    pub fn from_optional(value: Option<&Result<Option<T>, ApiError>>) -> Self {
        match value {
            None => LoadState::Loading,
            Some(Ok(Some(value))) => LoadState::Ready(value.clone()),
            Some(Ok(None)) | Some(Err(ApiError::NotFound)) => LoadState::NotFound,
            Some(Err(_)) => LoadState::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::api::ApiError;

    use super::LoadState;

    #[test]
    fn maps_resource_results() {
        assert_eq!(LoadState::<i32>::from_resource(None), LoadState::Loading);
        assert_eq!(LoadState::from_resource(Some(&Ok(3))), LoadState::Ready(3));
        assert_eq!(
            LoadState::<i32>::from_resource(Some(&Err(ApiError::NotFound))),
            LoadState::NotFound
        );
        assert_eq!(
            LoadState::<i32>::from_resource(Some(&Err(ApiError::Forbidden))),
            LoadState::Failed
        );
        assert_eq!(
            LoadState::<i32>::from_resource(Some(&Err(ApiError::Transport(
                "offline".to_string()
            )))),
            LoadState::Failed
        );
    }

    #[test]
    fn treats_missing_optional_row_as_not_found() {
        assert_eq!(
            LoadState::<i32>::from_optional(Some(&Ok(None))),
            LoadState::NotFound
        );
        assert_eq!(LoadState::from_optional(Some(&Ok(Some(1)))), LoadState::Ready(1));
    }
}
