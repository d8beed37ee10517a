//! Main server context.

use rouille::{Request, Response, router};
use handlebars::Handlebars;
use apm_util::http::{HttpServer, query_param};
use log::*;

use crate::backend::AirportBackend;
use crate::client::MapClient;
use crate::errors::*;
use crate::tmpl::TemplateContext;
use crate::templates::map::MapPageView;

/// Default search radius for `/airports/nearby`, in km.
const DEFAULT_NEARBY_RADIUS: f64 = 100.0;

pub struct App<B> {
    client: MapClient<B>,
    hbs: Handlebars
}

impl<B: AirportBackend> HttpServer for App<B> {
    type Error = KarteError;

    fn on_request(&self, req: &Request) -> KarteResult<Response> {
        router!(req,
            (GET) (/) => {
                TemplateContext {
                    template: "map",
                    title: "Airports".into(),
                    body: MapPageView::new(self.client.map())
                }.render(&self.hbs)
            },
            (GET) (/markers) => {
                Ok(Response::json(&self.client.map().to_feature_collection()))
            },
            (POST) (/markers/{idx: usize}/click) => {
                if !self.client.click(idx)? {
                    debug!("Marker {} has no click listener", idx);
                }
                Ok(Response::empty_204())
            },
            (GET) (/airports/nearby) => {
                let lat: f64 = query_param(req, "lat")
                    .ok().and_then(|x| x)
                    .ok_or(KarteError::BadParameter("lat"))?;
                let lng: f64 = query_param(req, "lng")
                    .ok().and_then(|x| x)
                    .ok_or(KarteError::BadParameter("lng"))?;
                let radius = query_param(req, "radius")
                    .map_err(|_| KarteError::BadParameter("radius"))?
                    .unwrap_or(DEFAULT_NEARBY_RADIUS);
                let ret = self.client.backend().nearby(lat, lng, radius)?;
                Ok(Response::json(&ret))
            },
            (GET) (/airports/popular) => {
                let ret = self.client.backend().popular()?;
                Ok(Response::json(&ret))
            },
            _ => {
                let asset_resp = rouille::match_assets(req, "static");
                if asset_resp.is_success() {
                    Ok(asset_resp)
                }
                else {
                    Err(KarteError::InvalidPath)
                }
            }
        )
    }
}

impl<B: AirportBackend> App<B> {
    pub fn new(client: MapClient<B>, hbs: Handlebars) -> Self {
        Self { client, hbs }
    }
    pub fn client(&self) -> &MapClient<B> {
        &self.client
    }
}
