/// Универсальные утилиты для работы со списками (поиск, сортировка)
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Значения полей, по которым ищет текстовый фильтр
    fn search_values(&self) -> Vec<&str>;

    /// Проверяет, соответствует ли объект поисковому запросу:
    /// подстрока без учёта регистра хотя бы в одном поле
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_values()
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю (по возрастанию)
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;

    /// Пустое значение поля: такие записи всегда идут в конце
    fn is_blank(&self, _field: &str) -> bool {
        false
    }
}

/// Сортирует список по указанному полю.
/// Сортировка стабильная: равные элементы сохраняют исходный порядок.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| match (a.is_blank(field), b.is_blank(field)) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
        (false, false) => {
            let cmp = a.compare_by_field(b, field);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        rank: Option<u32>,
    }

    impl Searchable for Row {
        fn search_values(&self) -> Vec<&str> {
            vec![self.name]
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            self.rank.cmp(&other.rank)
        }

        fn is_blank(&self, _field: &str) -> bool {
            self.rank.is_none()
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Alpha", rank: Some(2) },
            Row { name: "beta", rank: None },
            Row { name: "Gamma", rank: Some(1) },
            Row { name: "alphabet", rank: Some(2) },
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let count = |needle: &str| rows().iter().filter(|r| r.matches_filter(needle)).count();
        assert_eq!(count("ALPHA"), 2);
        assert_eq!(count("  "), 4);
    }

    #[test]
    fn test_sort_keeps_blanks_last_both_directions() {
        let mut asc = rows();
        sort_list(&mut asc, "rank", true);
        let names: Vec<_> = asc.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Gamma", "Alpha", "alphabet", "beta"]);

        let mut desc = rows();
        sort_list(&mut desc, "rank", false);
        let names: Vec<_> = desc.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "alphabet", "Gamma", "beta"]);
    }
}
