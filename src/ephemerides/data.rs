use super::{Color, EphemeridesBody};

// Source: JPL Horizons, https://ssd.jpl.nasa.gov/horizons/app.html

pub static SOLAR_SYSTEM: &[EphemeridesBody] = &[
    EphemeridesBody {
        name: "Sol",
        mass: 1988500e24,
        radius: 695700e3,
        color: Color::GOLD,
        position: [-1.283674643550172e9, 2.589397504295033e7, 5.007104996950605e8],
        velocity: [-5.809369653802155e0, 2.513455442031695e-1, -1.461959576560110e1],
    },
    EphemeridesBody {
        name: "Mercury",
        mass: 0.3302e24,
        radius: 2440e3,
        color: Color::GRAY,
        position: [5.242617205495467e10, -5.398976570474024e9, -5.596063357617276e9],
        velocity: [-3.931719860392732e3, 4.493726800433638e3, 5.056613955108243e4],
    },
    EphemeridesBody {
        name: "Venus",
        mass: 4.8685e24,
        radius: 6051.84e3,
        color: Color::BEIGE,
        position: [-1.143612889654620e10, 2.081921801192194e9, 1.076180391552140e11],
        velocity: [-3.498958532524220e4, 1.971012081662609e3, -3.509011592387367e3],
    },
    EphemeridesBody {
        name: "Earth",
        mass: 5.97219e24,
        radius: 6371.01e3,
        color: Color::BLUE,
        position: [-2.741147560901964e10, 1.907499306293577e7, 1.452697499646169e11],
        velocity: [-2.981801522121922e4, 1.781036907294364e0, -5.415519940416356e3],
    },
    EphemeridesBody {
        name: "Mars",
        mass: 0.64171e24,
        radius: 3389.92e3,
        color: Color::RED,
        position: [-1.309510737126251e11, -7.714450109843910e8, -1.893127398896606e11],
        velocity: [2.090994471204196e4, -7.557181497936503e2, -1.160503586188451e4],
    },
    EphemeridesBody {
        name: "Jupiter",
        mass: 1898.18722e24,
        radius: 69911e3,
        color: Color::BEIGE,
        position: [6.955554713494443e11, -1.444959769995748e10, -2.679620040967891e11],
        velocity: [4.539612624165795e3, -1.547160200183022e2, 1.280513202430234e4],
    },
    EphemeridesBody {
        name: "Saturn",
        mass: 568.34e24,
        radius: 58232e3,
        color: Color::LIGHT_GRAY,
        position: [1.039929189378534e12, -2.303100000185490e10, -1.056650101932204e12],
        velocity: [6.345150006906061e3, -3.704447055166629e2, 6.756117358248296e3],
    },
    EphemeridesBody {
        name: "Uranus",
        mass: 86.813e24,
        radius: 25362e3,
        color: Color::SKY_BLUE,
        position: [2.152570437700128e12, -2.039611192913723e10, 2.016888245555490e12],
        velocity: [-4.705853565766252e3, 7.821724397220797e1, 4.652144641704226e3],
    },
    EphemeridesBody {
        name: "Neptune",
        mass: 102.409e24,
        radius: 24624e3,
        color: Color::DARK_BLUE,
        position: [4.431790029686977e12, -8.954348456482631e10, -6.114486878028781e11],
        velocity: [7.066237951457524e2, -1.271365751559108e2, 5.417076605926207e3],
    },
];

pub static ALPHA_CENTAURI_SYSTEM: &[EphemeridesBody] = &[
    EphemeridesBody {
        name: "Alpha Centauri A",
        mass: 2167000e24,
        radius: 834840.0,
        color: Color::YELLOW,
        position: [7.76412948e11, 0.0, 0.0],
        velocity: [0.0, 0.0, 7.120e3],
    },
    EphemeridesBody {
        name: "Alpha Centauri B",
        mass: 1789000e24,
        radius: 626130.0,
        color: Color::GOLD,
        position: [-9.20026904e11, 0.0, 0.0],
        velocity: [0.0, 0.0, -8.430e3],
    },
];
