use actix_web::web;

use crate::handlers::{blog_posts, pages, projects};

/// JSON endpoints mounted under `/api/v1`.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blog")
            .service(
                web::resource("/slugs")
                    .route(web::get().to(blog_posts::post_slugs))
            )
            .service(
                web::resource("/tags")
                    .route(web::get().to(blog_posts::post_tags))
            )
            .service(
                web::resource("/posts/{slug}/views")
                    .route(web::post().to(blog_posts::record_view))
            )
    );

    cfg.service(
        web::resource("/projects/ids")
            .route(web::get().to(projects::project_ids))
    );

    cfg.service(
        web::resource("/contact")
            .route(web::post().to(pages::submit_contact))
    );
}
