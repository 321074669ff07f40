use actix_web::web;

use crate::handlers::projects::admin_get_all_projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(
                web::resource("/projects")
                    .route(web::get().to(admin_get_all_projects))
            )
    );
}
