/// Утилиты для постраничного вывода списков
///
/// Страницы нумеруются с 1. Пустой список даёт 0 страниц.

/// Количество страниц: `ceil(len / page_size)`
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Окно `[(page-1)*page_size, page*page_size)` поверх `items`
///
/// Номер страницы за пределами списка даёт пустой срез.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Подпись "Page X of Y"
pub fn page_label(page: usize, total_pages: usize) -> String {
    format!("Page {} of {}", page, total_pages)
}
