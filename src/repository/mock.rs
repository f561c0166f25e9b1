//! Mock data sources for isolating list controllers in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::case::{Case, CaseChange};
use crate::domain::client::{Client, ClientChange};
use crate::domain::filter::ListFilter;
use crate::domain::types::{CaseId, CaseStatus, ClientId, ClientStatus};
use crate::repository::errors::RepositoryResult;
use crate::repository::{EntityReader, EntityWriter};

mock! {
    pub CaseSource {}

    #[async_trait]
    impl EntityReader<Case> for CaseSource {
        async fn read_filtered(
            &self,
            filter: &ListFilter<CaseStatus>,
        ) -> RepositoryResult<Vec<Case>>;
    }

    #[async_trait]
    impl EntityWriter<Case> for CaseSource {
        async fn update_field(&self, id: &CaseId, change: CaseChange) -> RepositoryResult<Case>;
    }
}

mock! {
    pub ClientSource {}

    #[async_trait]
    impl EntityReader<Client> for ClientSource {
        async fn read_filtered(
            &self,
            filter: &ListFilter<ClientStatus>,
        ) -> RepositoryResult<Vec<Client>>;
    }

    #[async_trait]
    impl EntityWriter<Client> for ClientSource {
        async fn update_field(
            &self,
            id: &ClientId,
            change: ClientChange,
        ) -> RepositoryResult<Client>;
    }
}
