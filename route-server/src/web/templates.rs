//! Askama templates for the web frontend.
//!
//! The index page is the whole shell: the three screens (search, route
//! list, route detail) are client-side states driven by `static/app.js`,
//! which talks to `/api/routes`.

use askama::Template;

/// The single-page shell.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;
