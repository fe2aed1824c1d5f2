//! Переходы на уровне window.location

pub fn navigate_to(path: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window, cannot navigate to {}", path);
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("navigation to {} failed: {:?}", path, e);
    }
}

/// Перезагрузка страницы (сбрасывает всё клиентское состояние)
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}
