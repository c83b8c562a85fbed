use crate::{
    model::index::{IndexDto, SiteDto},
    server::state::AppState,
};

pub struct IndexService<'a> {
    state: &'a AppState,
}

impl<'a> IndexService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn site(&self) -> SiteDto {
        let config = &self.state.config;

        SiteDto {
            website_name: config.website_name.clone(),
            website_url: config.website_url.clone(),
            aowow_url: config.aowow_url.clone(),
        }
    }

    /// Landing page model with the site settings and realm names.
    pub fn get_index(&self) -> IndexDto {
        IndexDto {
            title: "Armory".to_string(),
            site: self.site(),
            realms: self.state.realms.names(),
        }
    }
}
