//! Per-category result layouts for terminal display.
//!
//! One layout per category, resolved through the strategy registry. Layouts
//! only read their own envelope shape; an error envelope renders as a marked
//! error block. A mismatched variant falls back to raw JSON so the shell
//! still shows something.

use console::style;
use std::fmt::Write as _;

use crate::category::Category;
use crate::engine::envelope::{
    CaptureReport, ExploitRun, PasswordReport, ResultEnvelope, RiskReport,
};

pub type RenderFn = fn(&ResultEnvelope) -> String;

/// The layout for a parsed category; unknown categories get the fallback.
pub fn layout_for(category: Option<Category>) -> RenderFn {
    match category {
        Some(Category::Password) => password,
        Some(Category::Risk) => risk,
        Some(Category::Phishing) => phishing,
        Some(Category::Leak) => leak,
        Some(Category::Headers) => headers,
        Some(Category::Ssl) => ssl,
        Some(Category::WebSecurity) => web_scan,
        Some(Category::PenetrationTesting) => pentest,
        Some(Category::NetworkSecurity) => port_scan,
        Some(Category::NetworkAnalysis) => capture,
        None => fallback,
    }
}

fn raw(envelope: &ResultEnvelope) -> String {
    serde_json::to_string_pretty(envelope).unwrap_or_else(|_| "<résultat illisible>".to_string())
}

fn error_block(message: &str) -> String {
    format!("{} {message}", style("Erreur :").red().bold())
}

fn severity_styled(severity: &str) -> String {
    let upper = severity.to_uppercase();
    match severity.to_ascii_lowercase().as_str() {
        "critical" | "high" => style(upper).red().to_string(),
        "medium" => style(upper).yellow().to_string(),
        _ => style(upper).dim().to_string(),
    }
}

fn fallback(envelope: &ResultEnvelope) -> String {
    match envelope {
        ResultEnvelope::NotImplemented(message) => style(message).dim().to_string(),
        other => raw(other),
    }
}

fn password(envelope: &ResultEnvelope) -> String {
    let ResultEnvelope::Password(PasswordReport {
        password,
        strength,
        entropy,
        length,
    }) = envelope
    else {
        return raw(envelope);
    };

    let mut out = String::new();
    let _ = writeln!(out, "Mot de passe généré : {}", style(password).bold());
    let _ = writeln!(out, "  Force    : {strength}");
    let _ = writeln!(out, "  Entropie : {entropy} bits");
    if let Some(length) = length {
        let _ = writeln!(out, "  Longueur : {length} caractères");
    }
    out
}

fn risk(envelope: &ResultEnvelope) -> String {
    let ResultEnvelope::Risk(RiskReport {
        level,
        score,
        color,
    }) = envelope
    else {
        return raw(envelope);
    };

    let styled_level = match color.as_str() {
        "red" => style(level).red().bold(),
        "orange" | "yellow" => style(level).yellow().bold(),
        _ => style(level).green().bold(),
    };
    format!("Niveau de risque : {styled_level}\nScore : {score:.1}/10\n")
}

fn phishing(envelope: &ResultEnvelope) -> String {
    let ResultEnvelope::Phishing(scenario) = envelope else {
        return raw(envelope);
    };

    format!(
        "Scénario de phishing :\n  \"{scenario}\"\n{}\n",
        style("⚠️ Ceci est un exemple éducatif. Ne pas utiliser à des fins malveillantes.").dim()
    )
}

fn leak(envelope: &ResultEnvelope) -> String {
    let ResultEnvelope::Leak(report) = envelope else {
        return raw(envelope);
    };
    if let Some(error) = &report.error {
        return error_block(error);
    }

    let mut out = String::new();
    if report.is_compromised {
        let _ = writeln!(
            out,
            "{}",
            style(format!(
                "⚠️ {} fuite(s) de données détectée(s)",
                report.breach_count
            ))
            .red()
        );
        for breach in &report.breaches {
            let _ = writeln!(
                out,
                "  {} ({}) — {}",
                style(&breach.name).bold(),
                breach.date,
                severity_styled(&breach.severity)
            );
            let _ = writeln!(out, "    {} enregistrements affectés", breach.records);
            if !breach.data_types.is_empty() {
                let _ = writeln!(out, "    Données : {}", breach.data_types.join(", "));
            }
        }
        if !report.recommendations.is_empty() {
            let _ = writeln!(out, "Recommandations :");
            for recommendation in &report.recommendations {
                let _ = writeln!(out, "  • {recommendation}");
            }
        }
    } else {
        let _ = writeln!(out, "{}", style("✅ Aucune fuite détectée").green());
        let _ = writeln!(
            out,
            "  Votre email n'apparaît pas dans les fuites de données connues."
        );
    }
    out
}

fn score_and_grade(out: &mut String, score: u32, grade: &str) {
    let styled_grade = if grade.starts_with('A') || grade.starts_with('B') {
        style(grade).green().bold()
    } else if grade.starts_with('C') {
        style(grade).yellow().bold()
    } else {
        style(grade).red().bold()
    };
    let _ = writeln!(out, "Score : {score}%   Note : {styled_grade}");
}

fn headers(envelope: &ResultEnvelope) -> String {
    let ResultEnvelope::Headers(report) = envelope else {
        return raw(envelope);
    };
    if let Some(error) = &report.error {
        return error_block(error);
    }

    let mut out = String::new();
    score_and_grade(&mut out, report.score, &report.grade);
    for (header, status) in &report.security_headers {
        let mark = if status.present { "✅" } else { "❌" };
        let _ = writeln!(out, "  {mark} {header} — {}", status.description);
    }
    if !report.recommendations.is_empty() {
        let _ = writeln!(out, "Recommandations :");
        for recommendation in &report.recommendations {
            let _ = writeln!(
                out,
                "  • {} : {}",
                recommendation.header, recommendation.description
            );
        }
    }
    out
}

fn ssl(envelope: &ResultEnvelope) -> String {
    let ResultEnvelope::Ssl(report) = envelope else {
        return raw(envelope);
    };
    if let Some(error) = &report.error {
        return error_block(error);
    }

    let mut out = String::new();
    score_and_grade(&mut out, report.score, &report.grade);
    if let Some(details) = &report.ssl {
        if details.enabled {
            let _ = writeln!(out, "  Protocole : {}", details.protocol);
            let hsts = if details.hsts.enabled {
                format!("Activé (max-age: {}s)", details.hsts.max_age)
            } else {
                "Non configuré".to_string()
            };
            let _ = writeln!(out, "  HSTS      : {hsts}");
        }
    }
    if !report.issues.is_empty() {
        let _ = writeln!(out, "Problèmes détectés :");
        for issue in &report.issues {
            let _ = writeln!(
                out,
                "  • [{}] {}",
                severity_styled(&issue.severity),
                issue.description
            );
        }
    }
    out
}

fn web_scan(envelope: &ResultEnvelope) -> String {
    let ResultEnvelope::WebSecurity(report) = envelope else {
        return raw(envelope);
    };
    if let Some(error) = &report.error {
        return error_block(error);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Scan terminé — Risque : {}",
        severity_styled(&report.risk_level)
    );
    let _ = writeln!(
        out,
        "  Vulnérabilités : {}   Tests effectués : {}",
        report.total_found, report.checks_performed
    );
    for vulnerability in &report.vulnerabilities {
        let _ = writeln!(
            out,
            "  • [{}] {} — {}",
            severity_styled(&vulnerability.severity),
            vulnerability.kind,
            vulnerability.description
        );
    }
    out
}

fn pentest(envelope: &ResultEnvelope) -> String {
    let ResultEnvelope::Pentest(ExploitRun {
        target,
        exploit,
        payload,
        status,
        sessions,
    }) = envelope
    else {
        return raw(envelope);
    };

    let styled_status = if status == "Success" {
        style(status).green().bold()
    } else {
        style(status).red().bold()
    };
    let mut out = String::new();
    let _ = writeln!(out, "Cible    : {target}");
    let _ = writeln!(out, "Exploit  : {exploit}");
    let _ = writeln!(out, "Payload  : {payload}");
    let _ = writeln!(out, "Statut   : {styled_status}");
    let _ = writeln!(out, "Sessions : {sessions}");
    out
}

fn port_scan(envelope: &ResultEnvelope) -> String {
    let ResultEnvelope::PortScan(report) = envelope else {
        return raw(envelope);
    };
    if let Some(error) = &report.error {
        return format!("{}\n  Cible : {}", error_block(error), report.target);
    }

    let mut out = String::new();
    let stats = &report.statistics;
    let _ = writeln!(
        out,
        "Scannés : {}   Ouverts : {}   Fermés : {}",
        stats.total_scanned,
        style(stats.open_ports).green(),
        stats.closed_ports
    );
    if !report.open_ports.is_empty() {
        let _ = writeln!(out, "Ports ouverts :");
        for port in &report.open_ports {
            let _ = writeln!(
                out,
                "  • Port {} — {} [{}]",
                port.port, port.service, port.category
            );
        }
    }
    if !report.security_issues.is_empty() {
        let _ = writeln!(out, "{}", style("⚠️ Problèmes de sécurité :").red());
        for issue in &report.security_issues {
            let _ = writeln!(
                out,
                "  • [{}] {} — {}",
                severity_styled(&issue.severity),
                issue.issue,
                issue.description
            );
        }
    }
    out
}

fn capture(envelope: &ResultEnvelope) -> String {
    let ResultEnvelope::Capture(CaptureReport {
        interface,
        duration,
        total_packets,
        protocols,
        top_talkers,
        suspicious_activity,
    }) = envelope
    else {
        return raw(envelope);
    };

    let mut out = String::new();
    let _ = writeln!(out, "Interface : {interface}   Durée : {duration}");
    let _ = writeln!(out, "Paquets capturés : {total_packets}");
    let _ = writeln!(out, "Protocoles détectés :");
    for protocol in protocols {
        let _ = writeln!(out, "  {:6} {}", protocol.name, protocol.count);
    }
    let _ = writeln!(out, "Top des communicants :");
    for talker in top_talkers {
        let _ = writeln!(out, "  {talker}");
    }
    if !suspicious_activity.is_empty() {
        let _ = writeln!(out, "{}", style("Activité suspecte :").red());
        for activity in suspicious_activity {
            let _ = writeln!(out, "  • {activity}");
        }
    }
    out
}
