use crate::conf::Conf;
use crate::error;
use crate::rest;
use crate::service::{NominatimClient, OverpassClient, ReverseGeocodeService, SpatialQueryService};
use crate::Result;
use actix_web::dev::Service;
use actix_web::web::JsonConfig;
use actix_web::{
    middleware::{Compress, NormalizePath},
    web::Data,
    App, HttpServer,
};
use futures_util::future::FutureExt;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::info;

pub async fn run(conf: Conf) -> Result<()> {
    // All the worker threads are sharing the same upstream clients
    let geocoder: Arc<dyn ReverseGeocodeService> =
        Arc::new(NominatimClient::new(&conf.nominatim_url, conf.http_timeout)?);
    let spatial: Arc<dyn SpatialQueryService> =
        Arc::new(OverpassClient::new(&conf.overpass_url, conf.http_timeout)?);

    info!(
        bind_addr = conf.bind_addr,
        port = conf.port,
        overpass_url = conf.overpass_url.as_str(),
        nominatim_url = conf.nominatim_url.as_str(),
        "Starting server",
    );

    HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let req_method = req.method().as_str().to_string();
                let req_path = req.path().to_string();
                let req_time = OffsetDateTime::now_utc();
                let req_ip = req
                    .connection_info()
                    .realip_remote_addr()
                    .unwrap_or_default()
                    .to_string();
                srv.call(req).map(move |res| {
                    if let Ok(res) = res.as_ref() {
                        let res_status = res.status().as_u16();
                        info!(
                            req_method,
                            req_path,
                            req_ip,
                            res_status,
                            res_time_sec = (OffsetDateTime::now_utc() - req_time).as_seconds_f64(),
                        );
                    }
                    res
                })
            })
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .app_data(Data::from(geocoder.clone()))
            .app_data(Data::from(spatial.clone()))
            .app_data(JsonConfig::default().error_handler(error::json_error_handler))
            .service(rest::vibes::post)
            .service(rest::reverse_geocode::post)
    })
    .bind((conf.bind_addr.as_str(), conf.port))?
    .run()
    .await?;

    Ok(())
}
