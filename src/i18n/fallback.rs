//! Built-in dictionaries
//!
//! Every key the bot uses is present here for every supported language, so a
//! missing or broken translation file never shows raw keys to users.

pub type Dictionary = &'static [(&'static str, &'static str)];

pub static RU: Dictionary = &[
    ("menu.test", "🧭 Тест"),
    ("menu.catalog", "🎯 Каталог"),
    ("menu.courses", "📚 Курсы"),
    ("menu.favorites", "⭐ Избранное"),
    ("menu.tip", "💡 Совет дня"),
    ("menu.profile", "👤 Профиль"),
    ("menu.back", "⬅️ В меню"),
    ("start.pick_language", "Выбери язык / Choose language / Dil seç:"),
    ("start.greeting", "Привет! Я Stepup 🚀 Помогу выбрать направление в карьере."),
    ("start.choose_below", "Выбери пункт ниже:"),
    ("language.title", "Выбери язык:"),
    ("language.set", "Язык интерфейса: {lang}"),
    ("age.prompt", "Сколько тебе лет? Выбери группу:"),
    ("age.teen", "🧒 Я подросток"),
    ("age.adult", "👤 Я взрослый"),
    ("age.saved", "Возрастная группа сохранена ✅"),
    ("catalog.choose_direction", "Выбери направление:"),
    ("catalog.professions_for", "Профессии — {category}"),
    ("catalog.skills", "Навыки:"),
    ("courses.courses_for", "Подбор курсов для направления: {category}"),
    ("courses.link", "Ссылка"),
    ("courses.no_interest", "Сначала выбери направление в каталоге, чтобы я мог подобрать курсы."),
    ("quiz.unavailable", "Тест временно недоступен."),
    ("quiz.question", "Вопрос {current}/{total}"),
    ("quiz.results_title", "Итоги карьерного теста"),
    ("quiz.closest", "Твоё ближайшее направление:"),
    ("quiz.also_close", "Также близко:"),
    ("quiz.expired", "Тест не запущен или устарел. Начни заново: /test"),
    ("favorites.add_button", "⭐ В избранное"),
    ("favorites.added", "Добавлено в избранное ⭐"),
    ("favorites.removed", "Удалено из избранного"),
    ("favorites.empty", "У тебя пока нет избранных профессий или курсов."),
    ("favorites.header", "Твоё избранное:"),
    ("favorites.professions_header", "Избранные профессии:"),
    ("favorites.courses_header", "Избранные курсы:"),
    ("profile.title", "Твой профиль:"),
    ("profile.not_found", "Профиль не найден. Нажмите /start"),
    ("profile.id_label", "Ваш Telegram ID:"),
    ("profile.name", "Имя"),
    ("profile.age_group", "Возрастная группа"),
    ("profile.interest", "Направление"),
    ("profile.scores", "Итоги теста"),
    ("profile.not_set", "—"),
    ("tip.today", "Сегодняшний совет:"),
    ("tip.default", "Делай маленькие шаги каждый день."),
    ("feedback.prompt", "Напиши сюда свой отзыв/вопрос одним сообщением — я передам его администраторам."),
    ("feedback.sent", "Спасибо! Сообщение передано администраторам."),
    ("feedback.failed", "Не удалось передать сообщение. Попробуй позже."),
    (
        "help.text",
        "Команды:\n\
         /test — пройти карьерный тест\n\
         /catalog — открыть каталог направлений\n\
         /courses — подобрать бесплатные курсы\n\
         /favorites — показать избранное\n\
         /fav_courses — только избранные курсы\n\
         /roles — список направлений\n\
         /tip — совет дня\n\
         /lang — сменить язык\n\
         /profile — профиль\n\
         /id — узнать свой Telegram ID\n\
         /reset — очистить профиль\n\
         /about — о боте\n\
         /feedback — отправить отзыв",
    ),
    ("about.text", "Я Stepup — карьерный бот, который помогает примерить направления и подобрать бесплатные курсы."),
    ("reset.done", "Данные профиля и избранное очищены. Начнём заново — /start"),
    ("common.no_data", "Пока нет данных для этого запроса."),
    ("common.ok", "Ок"),
    ("errors.generic", "Что-то пошло не так. Попробуй ещё раз."),
    ("categories.creative", "Творчество"),
    ("categories.tech", "Технологии"),
    ("categories.social", "Коммуникации"),
    ("categories.business", "Бизнес"),
    ("categories.green", "Green/ESG"),
];

pub static EN: Dictionary = &[
    ("menu.test", "🧭 Test"),
    ("menu.catalog", "🎯 Catalog"),
    ("menu.courses", "📚 Courses"),
    ("menu.favorites", "⭐ Favorites"),
    ("menu.tip", "💡 Daily tip"),
    ("menu.profile", "👤 Profile"),
    ("menu.back", "⬅️ Back"),
    ("start.pick_language", "Choose language:"),
    ("start.greeting", "Hi! I’m Stepup 🚀 I’ll help you choose a career direction."),
    ("start.choose_below", "Choose an option below:"),
    ("language.title", "Choose language:"),
    ("language.set", "Interface language: {lang}"),
    ("age.prompt", "How old are you? Choose a group:"),
    ("age.teen", "🧒 I’m a teen"),
    ("age.adult", "👤 I’m an adult"),
    ("age.saved", "Age group saved ✅"),
    ("catalog.choose_direction", "Choose a direction:"),
    ("catalog.professions_for", "Professions — {category}"),
    ("catalog.skills", "Skills:"),
    ("courses.courses_for", "Courses for your track: {category}"),
    ("courses.link", "Link"),
    ("courses.no_interest", "First choose a direction in the catalog so I can suggest courses."),
    ("quiz.unavailable", "Test is temporarily unavailable."),
    ("quiz.question", "Question {current}/{total}"),
    ("quiz.results_title", "Test results"),
    ("quiz.closest", "Your closest track:"),
    ("quiz.also_close", "Also close:"),
    ("quiz.expired", "The test is not running or has expired. Start again: /test"),
    ("favorites.add_button", "⭐ Favorite"),
    ("favorites.added", "Added to favorites ⭐"),
    ("favorites.removed", "Removed from favorites"),
    ("favorites.empty", "You don’t have any favorite professions or courses yet."),
    ("favorites.header", "Your favorites:"),
    ("favorites.professions_header", "Favorite professions:"),
    ("favorites.courses_header", "Favorite courses:"),
    ("profile.title", "Your profile:"),
    ("profile.not_found", "Profile not found. Press /start"),
    ("profile.id_label", "Your Telegram ID:"),
    ("profile.name", "Name"),
    ("profile.age_group", "Age group"),
    ("profile.interest", "Track"),
    ("profile.scores", "Test results"),
    ("profile.not_set", "—"),
    ("tip.today", "Today’s tip:"),
    ("tip.default", "Take small steps every day."),
    ("feedback.prompt", "Send your feedback in one message — I’ll forward it to admins."),
    ("feedback.sent", "Thanks! Message forwarded to admins."),
    ("feedback.failed", "Could not forward your message. Please try again later."),
    (
        "help.text",
        "Commands:\n\
         /test — take the career test\n\
         /catalog — open track catalog\n\
         /courses — get free courses\n\
         /favorites — show favorites\n\
         /fav_courses — only favorite courses\n\
         /roles — list of tracks\n\
         /tip — daily tip\n\
         /lang — change language\n\
         /profile — profile\n\
         /id — show your Telegram ID\n\
         /reset — clear your profile\n\
         /about — about the bot\n\
         /feedback — send feedback",
    ),
    ("about.text", "I’m Stepup — a career bot that helps you explore tracks and find free courses."),
    ("reset.done", "Profile and favorites cleared. Start again — /start"),
    ("common.no_data", "No data for this request yet."),
    ("common.ok", "OK"),
    ("errors.generic", "Something went wrong. Please try again."),
    ("categories.creative", "Creative"),
    ("categories.tech", "Technology"),
    ("categories.social", "Communication"),
    ("categories.business", "Business"),
    ("categories.green", "Green/ESG"),
];

pub static AZ: Dictionary = &[
    ("menu.test", "🧭 Test"),
    ("menu.catalog", "🎯 Kataloq"),
    ("menu.courses", "📚 Kurslar"),
    ("menu.favorites", "⭐ Seçilənlər"),
    ("menu.tip", "💡 Günün məsləhəti"),
    ("menu.profile", "👤 Profil"),
    ("menu.back", "⬅️ Geri"),
    ("start.pick_language", "Dili seç:"),
    ("start.greeting", "Salam! Stepup karyera seçiminə kömək edəcək 🚀"),
    ("start.choose_below", "Aşağıdan seçim et:"),
    ("language.title", "Dili seç:"),
    ("language.set", "Dil: {lang}"),
    ("age.prompt", "Neçə yaşın var? Qrupu seç:"),
    ("age.teen", "🧒 Yeniyetməyəm"),
    ("age.adult", "👤 Böyüyəm"),
    ("age.saved", "Yaş qrupu yadda saxlanıldı ✅"),
    ("catalog.choose_direction", "İstiqaməti seç:"),
    ("catalog.professions_for", "Peşələr — {category}"),
    ("catalog.skills", "Bacarıqlar:"),
    ("courses.courses_for", "İstiqamət üçün kurslar: {category}"),
    ("courses.link", "Keçid"),
    ("courses.no_interest", "Əvvəlcə kataloqdan istiqamət seç, sonra kurslar təklif edim."),
    ("quiz.unavailable", "Test müvəqqəti əlçatmazdır."),
    ("quiz.question", "Sual {current}/{total}"),
    ("quiz.results_title", "Test nəticələri"),
    ("quiz.closest", "Ən yaxın istiqamət:"),
    ("quiz.also_close", "Həmçinin:"),
    ("quiz.expired", "Test başlamayıb və ya vaxtı bitib. Yenidən başla: /test"),
    ("favorites.add_button", "⭐ Seçilənlərə"),
    ("favorites.added", "Seçilənlərə əlavə olundu ⭐"),
    ("favorites.removed", "Seçilənlərdən silindi"),
    ("favorites.empty", "Seçilmiş peşə və ya kursların yoxdur."),
    ("favorites.header", "Sənin seçilənlərin:"),
    ("favorites.professions_header", "Seçilmiş peşələr:"),
    ("favorites.courses_header", "Seçilmiş kurslar:"),
    ("profile.title", "Sənin profilin:"),
    ("profile.not_found", "Profil tapılmadı. /start yazın"),
    ("profile.id_label", "Telegram ID:"),
    ("profile.name", "Ad"),
    ("profile.age_group", "Yaş qrupu"),
    ("profile.interest", "İstiqamət"),
    ("profile.scores", "Test nəticələri"),
    ("profile.not_set", "—"),
    ("tip.today", "Bu günün məsləhəti:"),
    ("tip.default", "Hər gün kiçik addımlar at."),
    ("feedback.prompt", "Rəyinizi bir mesajla yazın — adminlərə göndərəcəyəm."),
    ("feedback.sent", "Təşəkkürlər! Mesaj adminlərə göndərildi."),
    ("feedback.failed", "Mesajı göndərmək alınmadı. Sonra yenidən cəhd et."),
    (
        "help.text",
        "Komandalar:\n\
         /test — karyera testi\n\
         /catalog — istiqamət kataloqu\n\
         /courses — pulsuz kurslar\n\
         /favorites — seçilənlər\n\
         /fav_courses — yalnız kurslar\n\
         /roles — istiqamətlər siyahısı\n\
         /tip — günün məsləhəti\n\
         /lang — dili dəyişmək\n\
         /profile — profil\n\
         /id — Telegram ID\n\
         /reset — profili təmizləmək\n\
         /about — bot haqqında\n\
         /feedback — rəy göndərmək",
    ),
    ("about.text", "Mən Stepupam — karyera istiqaməti seçməyə və pulsuz kurs tapmağa kömək edən botam."),
    ("reset.done", "Məlumatlar təmizləndi. Yenidən başlamaq üçün /start yazın."),
    ("common.no_data", "Bu sorğu üzrə məlumat yoxdur."),
    ("common.ok", "OK"),
    ("errors.generic", "Nəsə səhv getdi. Yenidən cəhd et."),
    ("categories.creative", "Yaradıcılıq"),
    ("categories.tech", "Texnologiyalar"),
    ("categories.social", "Kommunikasiya"),
    ("categories.business", "Biznes"),
    ("categories.green", "Green/ESG"),
];

/// Dictionary for a language code
pub fn dictionary(lang: &str) -> Option<Dictionary> {
    match lang {
        "ru" => Some(RU),
        "en" => Some(EN),
        "az" => Some(AZ),
        _ => None,
    }
}

pub fn lookup(lang: &str, key: &str) -> Option<&'static str> {
    dictionary(lang)?
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Every key the bot looks up
pub fn keys() -> impl Iterator<Item = &'static str> {
    RU.iter().map(|(k, _)| *k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionaries_cover_same_keys() {
        for dict in [EN, AZ] {
            assert_eq!(dict.len(), RU.len());
            for key in keys() {
                assert!(dict.iter().any(|(k, _)| *k == key), "missing key {}", key);
            }
        }
    }

    #[test]
    fn test_no_empty_values() {
        for dict in [RU, EN, AZ] {
            for (key, value) in dict {
                assert!(!value.trim().is_empty(), "empty value for {}", key);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("en", "menu.test"), Some("🧭 Test"));
        assert_eq!(lookup("az", "categories.tech"), Some("Texnologiyalar"));
        assert_eq!(lookup("de", "menu.test"), None);
        assert_eq!(lookup("ru", "no.such.key"), None);
    }
}
