// --- Planificador de Horarios (sugang) - Archivo principal ---

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sugang::algorithm::ConflictRule;
use sugang::config::{ScheduleParams, load_params};
use sugang::render::{GraphRenderer, Timetable, TimetableRenderer, to_dot};
use sugang::{PlanOutcome, logger, run_schedule_with_params};

#[derive(Debug, Parser)]
#[command(name = "sugang", version, about = "Arma un horario sin choques a partir del catálogo de cursos")]
struct Cli {
    /// Archivo JSON con parámetros (ver `ScheduleParams`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directorio con los JSON del catálogo
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[arg(long)]
    max_courses: Option<usize>,

    #[arg(long)]
    max_credits: Option<u32>,

    /// Sin tope de créditos
    #[arg(long, conflicts_with = "max_credits")]
    no_credit_cap: bool,

    /// Día preferido (1 = lunes .. 7 = domingo); repetible
    #[arg(long = "day", value_parser = clap::value_parser!(u8).range(1..=7))]
    days: Vec<u8>,

    /// Créditos aceptados; repetible
    #[arg(long = "credit")]
    credits: Vec<u32>,

    /// Ramo que se incluye siempre (nombre en coreano); repetible
    #[arg(long = "subject")]
    subjects: Vec<String>,

    #[arg(long)]
    language: Option<String>,

    /// Considerar choque a menos de una hora en vez de franja idéntica
    #[arg(long)]
    within_hour: bool,

    /// Abortar si algún class_time está mal formado
    #[arg(long)]
    strict: bool,

    /// Dibujo del horario (.png o .svg)
    #[arg(long)]
    timetable: Option<PathBuf>,

    /// Dibujo del grafo de conflictos (.png o .svg)
    #[arg(long)]
    graph_image: Option<PathBuf>,

    /// Grafo en formato DOT
    #[arg(long)]
    graph_dot: Option<PathBuf>,

    #[arg(long)]
    font: Option<String>,

    /// Imprimir el resultado como JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    // Los flags pisan lo que venga del archivo de parámetros.
    fn into_params(self) -> sugang::Result<ScheduleParams> {
        let mut params = match &self.config {
            Some(path) => load_params(path)?,
            None => ScheduleParams::default(),
        };

        if self.data_dir.is_some() {
            params.data_dir = self.data_dir;
        }
        let prefs = &mut params.preferences;
        if self.max_courses.is_some() {
            prefs.max_courses = self.max_courses;
        }
        if self.no_credit_cap {
            prefs.max_credits = None;
        } else if self.max_credits.is_some() {
            prefs.max_credits = self.max_credits;
        }
        if !self.days.is_empty() {
            prefs.preferred_days = Some(self.days.into_iter().collect::<BTreeSet<_>>());
        }
        if !self.credits.is_empty() {
            prefs.preferred_credits = Some(self.credits.into_iter().collect());
        }
        if !self.subjects.is_empty() {
            prefs.preferred_subjects = Some(self.subjects.into_iter().collect());
        }
        if self.language.is_some() {
            prefs.preferred_language = self.language;
        }
        if self.within_hour {
            params.conflict_rule = ConflictRule::WithinHour;
        }
        if self.strict {
            params.strict_time_parsing = true;
        }
        if self.timetable.is_some() {
            params.outputs.timetable = self.timetable;
        }
        if self.graph_image.is_some() {
            params.outputs.graph_image = self.graph_image;
        }
        if self.graph_dot.is_some() {
            params.outputs.graph_dot = self.graph_dot;
        }
        if let Some(font) = self.font {
            params.font_family = font;
        }
        params.validate()?;
        Ok(params)
    }
}

fn print_selected(outcome: &PlanOutcome) {
    println!("\nSelected courses:");
    for course in outcome.selected_courses() {
        println!(
            "Subject ID: {}, Korean Name: {}, English Name: {}, Credit: {}",
            course.subject_id, course.subject_korean_name, course.subject_english_name, course.credit_points
        );
    }
    println!("Total credits: {}", outcome.schedule.total_credits);
}

fn write_outputs(outcome: &PlanOutcome, params: &ScheduleParams) -> sugang::Result<()> {
    if let Some(path) = &params.outputs.graph_dot {
        std::fs::write(path, to_dot(&outcome.graph))?;
        log::info!("DOT escrito en {:?}", path);
    }
    if let Some(path) = &params.outputs.graph_image {
        GraphRenderer::new(&outcome.graph)
            .with_font(&params.font_family)
            .highlight(outcome.schedule.ids().iter().cloned())
            .render(path)?;
    }
    if let Some(path) = &params.outputs.timetable {
        let table = Timetable::build(&outcome.schedule, &outcome.graph);
        TimetableRenderer::new(&table).with_font(&params.font_family).render(path)?;
    }
    Ok(())
}

fn run(cli: Cli) -> sugang::Result<()> {
    let json = cli.json;
    let params = cli.into_params()?;
    let outcome = run_schedule_with_params(&params)?;

    if json {
        let out = serde_json::json!({
            "schedule": &outcome.schedule,
            "courses": outcome.selected_courses(),
        });
        println!("{:#}", out);
    } else {
        print_selected(&outcome);
    }

    write_outputs(&outcome, &params)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose, cli.log_file.as_deref());
    log::info!("=== Planificador de Horarios ===");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
