use crate::models::{Comment, Route};

struct SeedComment {
    author: &'static str,
    text: &'static str,
    date: &'static str,
}

struct SeedRoute {
    id: i64,
    title: &'static str,
    image: &'static str,
    image_thumb: &'static str,
    distance: &'static str,
    difficulty: &'static str,
    time: &'static str,
    description: &'static str,
    likes: i64,
    comments: &'static [SeedComment],
}

const SEED_ROUTES: &[SeedRoute] = &[
    SeedRoute {
        id: 1,
        title: "Buena Vista",
        image: "./assets/images/landscape-1.webp",
        image_thumb: "./assets/images/landscape-1-thumb.webp",
        distance: "3.5 km",
        difficulty: "Fácil",
        time: "3 hrs",
        description: "Una de las mejores experiencias de senderismo en el Eje Cafetero se encuentra en Buenavista, un municipio conocido cariñosamente como el 'Balcón del Quindío' debido a su ubicación privilegiada en lo alto de una colina de la Cordillera Central, lo que le otorga las mejores vistas panorámicas de la región.",
        likes: 124,
        comments: &[SeedComment {
            author: "Juan Perez",
            text: "Excelente ruta, me encantó.",
            date: "12/02/2026",
        }],
    },
    SeedRoute {
        id: 2,
        title: "Cascada del Silencio (Arenales)",
        image: "./assets/images/landscape-2.webp",
        image_thumb: "./assets/images/landscape-2-thumb.webp",
        distance: "5.2 km",
        difficulty: "Media",
        time: "4.5 hrs",
        description: "Un recorrido fascinante a través de densos bosques nativos y cruces de río que culmina en una majestuosa cascada escondida. Ideal para desconectar de la ciudad y conectar con la naturaleza, con varios tramos de ascensos moderados bajo la sombra de los árboles.",
        likes: 342,
        comments: &[
            SeedComment {
                author: "Ana M.",
                text: "El agua estaba helada pero valió la pena cada paso.",
                date: "20/02/2026",
            },
            SeedComment {
                author: "Carlos G.",
                text: "Llevar buen calzado, hay mucho barro en la segunda mitad del trayecto.",
                date: "22/02/2026",
            },
        ],
    },
    SeedRoute {
        id: 3,
        title: "Cerro Tusa",
        image: "./assets/images/landscape-3.webp",
        image_thumb: "./assets/images/landscape-3-thumb.webp",
        distance: "4.8 km",
        difficulty: "Alta",
        time: "6 hrs",
        description: "El ascenso a la pirámide natural más alta del mundo. Una ruta muy exigente que requiere buena condición física y técnica de agarre, ya que la pendiente supera los 45 grados en varios tramos. La recompensa es una vista inigualable de 360 grados en la cumbre.",
        likes: 890,
        comments: &[SeedComment {
            author: "David",
            text: "La bajada es más dura que la subida. ¡Lleven guantes!",
            date: "24/02/2026",
        }],
    },
];

/// The catalog every process starts with.
///
/// Seed comments are numbered from 1 within each route, and each route's
/// comment counter continues after the last seeded id.
pub fn seed_routes() -> Vec<Route> {
    SEED_ROUTES
        .iter()
        .map(|seed| {
            let comments: Vec<Comment> = seed
                .comments
                .iter()
                .zip(1..)
                .map(|(c, id)| Comment {
                    id,
                    author: c.author.to_string(),
                    text: c.text.to_string(),
                    date: c.date.to_string(),
                })
                .collect();
            let next_comment_id = comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;

            Route {
                id: seed.id,
                title: seed.title.to_string(),
                image: seed.image.to_string(),
                image_thumb: seed.image_thumb.to_string(),
                distance: seed.distance.to_string(),
                difficulty: seed.difficulty.to_string(),
                time: seed.time.to_string(),
                description: seed.description.to_string(),
                likes: seed.likes,
                comments,
                next_comment_id,
            }
        })
        .collect()
}
