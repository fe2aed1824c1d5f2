pub mod api;

use crate::shared::navigation::navigate_to;

/// Страница входа отдаётся сервером статикой
pub const LOGIN_PAGE: &str = "/login.html";

pub fn redirect_to_login() {
    navigate_to(LOGIN_PAGE);
}
