//! Static slide content for the research-proposal deck
//!
//! Bodies are HTML fragments injected into the slide container; styling
//! lives in `index.html`. Slide 6 carries the mount point for the live
//! MOT demo (`#mot-arena`), which the shell populates while the slide is
//! on screen.

/// Number of slides in the deck
pub const SLIDE_COUNT: usize = 10;

/// 1-based number of the slide hosting the MOT demo
pub const MOT_SLIDE: usize = 6;

/// One slide: optional header plus a body fragment
#[derive(Debug)]
pub struct Slide {
    pub title: Option<&'static str>,
    pub subtitle: Option<&'static str>,
    pub body_html: &'static str,
}

/// Content for a 1-based slide number (clamped into range)
pub fn slide(number: usize) -> &'static Slide {
    let idx = number.clamp(1, SLIDE_COUNT) - 1;
    &SLIDES[idx]
}

static SLIDES: [Slide; SLIDE_COUNT] = [
    // 1: Portada
    Slide {
        title: None,
        subtitle: None,
        body_html: r#"<div class="cover">
  <h1>Relación entre Videojuegos FPS<br/>y Atención Selectiva</h1>
  <div class="rule"></div>
  <h2>Un estudio experimental sobre experiencia y entrenamiento</h2>
</div>"#,
    },
    // 2: Introducción
    Slide {
        title: Some("Introducción: Problema y Controversia"),
        subtitle: None,
        body_html: r#"<div class="cols">
  <div class="card">
    <h4>Foco de Estudio</h4>
    <p><strong>Atención Selectiva Visual</strong>: filtrar estímulos relevantes
    en milisegundos bajo demanda perceptiva alta.</p>
  </div>
  <div class="card accent">
    <h4>Nuestra Estrategia</h4>
    <p>Maximizar la <strong>Validez de Constructo</strong> midiendo la atención
    con una tarea dinámica, no con cuestionarios.</p>
  </div>
</div>"#,
    },
    // 3: Marco teórico
    Slide {
        title: Some("Marco Teórico: Hipótesis"),
        subtitle: Some("Vásquez Echeverría (2006)"),
        body_html: r#"<div class="cols">
  <div class="card">
    <h4>Atención</h4>
    <p>Procesos <strong>Top-Down</strong> (metas) y <strong>Bottom-Up</strong>
    (estímulos) en competencia.</p>
  </div>
  <div class="card accent">
    <h4>Demanda Común</h4>
    <p><em>Aprender a Aprender</em> (Feng &amp; Spence): la pericia en FPS
    transfiere a nuevas tareas atencionales.</p>
  </div>
</div>"#,
    },
    // 4: Metodología
    Slide {
        title: Some("Metodología: Diseño"),
        subtitle: Some("Factorial 2x2 · Inter-Sujeto Aleatorio"),
        body_html: r#"<table class="design">
  <tr><th></th><th>Entrenamiento UFOV</th><th>Fluidez Verbal</th></tr>
  <tr><th>Jugador (Experto)</th><td>Grupo 1</td><td>Grupo 2</td></tr>
  <tr><th>No Jugador (Novato)</th><td>Grupo 3</td><td>Grupo 4</td></tr>
</table>
<p class="note"><strong>Var. Sujeto:</strong> no aleatoria ·
<strong>Var. Entrenamiento:</strong> aleatoria · Medida: delta Pre/Post-Test.</p>"#,
    },
    // 5: Participantes
    Slide {
        title: Some("Participantes: Muestreo"),
        subtitle: Some("Ref: Newzoo (2024)"),
        body_html: r#"<div class="cols">
  <div class="card"><h4>Edad</h4><p class="big">18 - 21</p></div>
  <div class="card accent"><h4>Muestra Total</h4><p class="big">N = 60</p><p>(30 / grupo)</p></div>
  <div class="card"><h4>Verificación</h4>
    <p>Jugadores: últimos <strong>5 años</strong> de actividad, validación vía
    <strong>SteamDB</strong> (API).</p></div>
</div>"#,
    },
    // 6: Instrumento MOT (live demo)
    Slide {
        title: Some("Instrumento: MOT"),
        subtitle: Some("Ref: Lukavsky (2016)"),
        body_html: r#"<div class="mot-slide">
  <div class="mot-steps">
    <div class="card"><h4>1 · Identificación</h4>
      <p>3s. <strong>1 Objetivo Verde</strong> vs 7 Distractores.</p></div>
    <div class="card accent"><h4>2 · Movimiento</h4>
      <p><strong>5 segundos.</strong> Caos aleatorio y ocultamiento.</p></div>
    <div class="card"><h4>3 · Respuesta</h4>
      <p>Señalar objetivo. Dificultad adaptativa.</p></div>
  </div>
  <div id="mot-arena" class="mot-arena"></div>
</div>"#,
    },
    // 7: Entrenamiento
    Slide {
        title: Some("Entrenamiento"),
        subtitle: None,
        body_html: r#"<div class="cols">
  <div class="card accent">
    <h4>Grupo Experimental · Tarea UFOV</h4>
    <p>Presión dual: identificar cara (rasgo sutil) en el centro y localizar
    un estímulo periférico.</p>
  </div>
  <div class="card">
    <h4>Grupo Control · Fluidez Verbal</h4>
    <p>Control activo que <strong>no</strong> entrena atención visual:
    fluidez categorial (animales/comidas) y fonémica ('M' o 'S', 60s).</p>
  </div>
</div>"#,
    },
    // 8: Procedimiento
    Slide {
        title: Some("Procedimiento (14 Días)"),
        subtitle: None,
        body_html: r#"<ol class="timeline">
  <li><strong>Día 1</strong> · Evaluación presencial · Pre-Test MOT</li>
  <li><strong>Días 2 al 13</strong> · Entrenamiento remoto</li>
  <li><strong>Día 14</strong> · Re-Test presencial · Post-Test MOT</li>
</ol>"#,
    },
    // 9: Factibilidad
    Slide {
        title: Some("Factibilidad y Ética"),
        subtitle: None,
        body_html: r#"<div class="cols">
  <div class="card"><h4>Recursos Técnicos</h4><p>Sin costo.</p></div>
  <div class="card"><h4>Metodología</h4><p>LABPSI (Mar del Plata)</p></div>
  <div class="card"><h4>Herramientas</h4>
    <p>Google Forms · SteamDB (API) · PsychoPy</p></div>
</div>"#,
    },
    // 10: Cierre
    Slide {
        title: None,
        subtitle: None,
        body_html: r#"<div class="cover">
  <h1>Muchas Gracias</h1>
  <div class="rule"></div>
  <h2>¿Preguntas?</h2>
</div>"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_lookup_is_clamped() {
        assert!(std::ptr::eq(slide(0), slide(1)));
        assert!(std::ptr::eq(slide(99), slide(SLIDE_COUNT)));
    }

    #[test]
    fn test_mot_slide_carries_arena_mount_point() {
        assert!(slide(MOT_SLIDE).body_html.contains("id=\"mot-arena\""));
    }

    #[test]
    fn test_only_one_slide_carries_arena() {
        let count = (1..=SLIDE_COUNT)
            .filter(|&n| slide(n).body_html.contains("mot-arena"))
            .count();
        assert_eq!(count, 1);
    }
}
