use crate::domain::common::Entity;

/// Класс (параллель), например "5" или "10".
pub type Standard = Entity;

/// Литера класса, например "А". Список зависит от выбранной параллели.
pub type Section = Entity;

/// Тип экзамена (четвертная работа, итоговая и т.д.).
pub type ExamType = Entity;
