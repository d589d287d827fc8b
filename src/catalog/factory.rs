use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::SharedLibrary;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;

pub(crate) fn create_catalog_service(config: &Configuration, library: SharedLibrary,
                                     publisher: Arc<dyn EventPublisher>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, library, publisher))
}
