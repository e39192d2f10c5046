//! French advisory copy for task alerts: deadline summaries, contextual
//! guidance, and routing to the relevant official procedure page.

use chrono::NaiveDate;

use crate::text::{day_count, long_date};

/// Keyword routing table for official procedure URLs, checked in order
/// against the lowercased task id. First match wins.
const SOURCE_URL_ROUTES: &[(&[&str], &str)] = &[
    (
        &["tva", "tax"],
        "https://www.service-public.fr/professionnels-entreprises/vosdroits/F23566",
    ),
    (
        &["social", "urssaf"],
        "https://www.urssaf.fr/portail/home/employeur/calculer-les-cotisations.html",
    ),
    (
        &["bilan", "comptable"],
        "https://www.service-public.fr/professionnels-entreprises/vosdroits/F31214",
    ),
    (&["declaration", "impot"], "https://www.impots.gouv.fr/professionnel"),
    (
        &["rh", "emploi"],
        "https://www.service-public.fr/professionnels-entreprises/vosdroits/N24267",
    ),
    (
        &["formation", "cpf"],
        "https://www.service-public.fr/professionnels-entreprises/vosdroits/F22570",
    ),
    (&["test", "demo"], "https://www.service-public.fr/professionnels-entreprises"),
];

/// Generic fallback for fiscal obligations when no route matches.
const SOURCE_URL_DEFAULT: &str =
    "https://www.service-public.fr/professionnels-entreprises/vosdroits/N24266";

/// Official procedure page for a task, routed by keyword.
pub fn official_source_url(task_id: &str) -> &'static str {
    let task = task_id.to_lowercase();
    for (keywords, url) in SOURCE_URL_ROUTES {
        if keywords.iter().any(|k| task.contains(k)) {
            return url;
        }
    }
    SOURCE_URL_DEFAULT
}

/// Deadline summary: the base message plus a deadline clause whose tone
/// follows how much time is left.
pub fn deadline_summary(base_message: &str, due_date: NaiveDate, days_remaining: i64) -> String {
    let due = long_date(due_date);
    if days_remaining <= 0 {
        format!("{base_message}. Cette tâche était due le {due} et est maintenant en retard.")
    } else if days_remaining == 1 {
        format!("{base_message}. Échéance demain ({due}).")
    } else if days_remaining <= 7 {
        format!(
            "{base_message}. Échéance le {due} dans {days_remaining} jours."
        )
    } else {
        format!("{base_message}. Échéance le {due}.")
    }
}

/// Contextual guidance bucketed by urgency.
pub fn urgency_analysis(task_name: &str, days_remaining: i64) -> String {
    let days = day_count(days_remaining);
    if days_remaining <= 0 {
        format!(
            "⚠️ La tâche \"{task_name}\" est en retard. Il est crucial de la traiter \
             immédiatement pour éviter d'éventuelles pénalités ou complications. Nous \
             recommandons de contacter votre expert-comptable si nécessaire."
        )
    } else if days_remaining == 1 {
        format!(
            "🚨 La tâche \"{task_name}\" doit être complétée demain. Assurez-vous d'avoir \
             tous les documents nécessaires et prévoyez du temps pour finaliser cette \
             démarche aujourd'hui."
        )
    } else if days_remaining <= 3 {
        format!(
            "⚡ La tâche \"{task_name}\" arrive à échéance dans {days}. Il est temps de \
             commencer la préparation et de rassembler les documents requis pour éviter \
             tout stress de dernière minute."
        )
    } else if days_remaining <= 7 {
        format!(
            "📅 La tâche \"{task_name}\" doit être complétée dans {days}. Vous avez \
             encore du temps, mais il est recommandé de planifier cette tâche dans \
             votre agenda pour la semaine."
        )
    } else if days_remaining <= 15 {
        format!(
            "📋 La tâche \"{task_name}\" arrive à échéance dans {days}. Vous pouvez \
             commencer à anticiper cette démarche et identifier les documents ou \
             informations nécessaires."
        )
    } else {
        format!(
            "📝 La tâche \"{task_name}\" est programmée dans {days}. Pas d'urgence, mais \
             vous pouvez déjà noter cette échéance dans votre planning pour ne pas \
             l'oublier."
        )
    }
}
