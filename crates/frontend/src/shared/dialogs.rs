//! Блокирующие браузерные диалоги (alert / confirm)
//!
//! Единственный канал обратной связи для операций с каталогами.

/// Показать модальное уведомление
pub fn alert(message: &str) {
    log::debug!("alert: {}", message);
    match web_sys::window() {
        Some(win) => {
            if let Err(e) = win.alert_with_message(message) {
                log::error!("alert failed: {:?}", e);
            }
        }
        None => log::warn!("no window, notification dropped: {}", message),
    }
}

/// Запросить подтверждение; без window считаем, что пользователь отказался
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
